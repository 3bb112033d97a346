use crate::angle::normalize_degrees;
use crate::ephemeris::types::{Body, BodyState, HouseCusps, HouseSystem};
use crate::ephemeris::{Ephemeris, EphemerisError};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};

// FLG_SWIEPH = 2 (use Swiss Ephemeris files), FLG_SPEED = 256
const FLG_SWIEPH: i32 = 2;
const CALC_FLAGS: i32 = FLG_SWIEPH | 256;
const HOUSE_FLAGS: i32 = 0;

// J2000, covered by every standard data file
const STARTUP_CHECK_JD: f64 = 2_451_545.0;

/// Without a readable data file the library quietly switches to its
/// built-in Moshier model and drops `FLG_SWIEPH` from the returned flags.
fn check_return_flags(code: i32, body: Body, jd_ut: f64) -> Result<(), EphemerisError> {
    if code & FLG_SWIEPH == 0 {
        return Err(EphemerisError::CalculationFailed {
            body: body.name().to_string(),
            jd: jd_ut,
            message: format!(
                "no Swiss Ephemeris data file covers this date (return flags {:#x})",
                code
            ),
        });
    }
    Ok(())
}

/// Swiss Ephemeris adapter implementation
#[derive(Debug)]
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    house_system: HouseSystem,
    // The C library keeps global calculation state.
    ffi: Mutex<()>,
}

impl SwissEphemerisAdapter {
    /// Point the library at `ephemeris_path` and make sure it can actually
    /// read data files from there.
    ///
    /// Fails with [`EphemerisError::FileNotFound`] when the directory is
    /// missing or holds no usable files.
    pub fn new(ephemeris_path: PathBuf, house_system: HouseSystem) -> Result<Self, EphemerisError> {
        let not_found = |message: &str| EphemerisError::FileNotFound {
            path: ephemeris_path.display().to_string(),
            message: message.to_string(),
        };

        if !ephemeris_path.is_dir() {
            return Err(not_found(
                "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.",
            ));
        }
        let path_str = ephemeris_path
            .to_str()
            .filter(|s| !s.contains('\0'))
            .ok_or_else(|| not_found("Ephemeris path is not valid UTF-8."))?;

        let adapter = Self {
            ephemeris_path: ephemeris_path.clone(),
            house_system,
            ffi: Mutex::new(()),
        };
        {
            let _guard = adapter.ffi_guard();
            set_ephe_path(path_str);
        }
        adapter
            .body_state(STARTUP_CHECK_JD, Body::Sun)
            .map_err(|e| not_found(&format!("No usable Swiss Ephemeris data files: {}", e)))?;

        log::info!(
            "Swiss Ephemeris ready (path: {}, houses: {})",
            ephemeris_path.display(),
            house_system.name()
        );
        Ok(adapter)
    }

    fn ffi_guard(&self) -> MutexGuard<'_, ()> {
        self.ffi.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    pub fn house_system(&self) -> HouseSystem {
        self.house_system
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn body_state(&self, jd_ut: f64, body: Body) -> Result<BodyState, EphemerisError> {
        let _guard = self.ffi_guard();
        let result = calc_ut(jd_ut, body.swe_id() as u32, CALC_FLAGS as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                jd: jd_ut,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        check_return_flags(result.code, body, jd_ut)?;

        let out = result.out;
        if !out[0].is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                jd: jd_ut,
                message: "non-finite longitude".to_string(),
            });
        }

        Ok(BodyState([out[0], out[1], out[2], out[3], out[4], out[5]]))
    }

    fn houses(&self, jd_ut: f64, lat: f64, lon: f64) -> Result<HouseCusps, EphemerisError> {
        use swisseph::{AscMc, Cusp};

        let (c, a) = {
            let _guard = self.ffi_guard();
            houses_ex(jd_ut, HOUSE_FLAGS, lat, lon, self.house_system.code() as i32)
        };
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if values.iter().any(|v| !v.is_finite()) || !ascmc.ascendant.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} houses undefined at lat {:.4}, lon {:.4}",
                    self.house_system.name(),
                    lat,
                    lon
                ),
            });
        }

        Ok(HouseCusps {
            cusps: values.map(normalize_degrees),
            ascendant: normalize_degrees(ascmc.ascendant),
            mc: normalize_degrees(ascmc.mc),
        })
    }
}
