use serde::{Deserialize, Serialize};

use crate::lunar::phase::PhaseName;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseInfo {
    pub emoji: String,
    pub description: String,
    pub energy: String,
}

// (phase, emoji, description, energy), in cycle order
pub const PHASE_INFO: [(PhaseName, &str, &str, &str); 8] = [
    (
        PhaseName::NewMoon,
        "\u{1F311}",
        "A time for new beginnings and setting intentions. The Moon is hidden from view.",
        "Planting seeds, fresh starts, introspection",
    ),
    (
        PhaseName::WaxingCrescent,
        "\u{1F312}",
        "The Moon is growing. Time to take action on your intentions.",
        "Taking action, building momentum, hope",
    ),
    (
        PhaseName::FirstQuarter,
        "\u{1F313}",
        "Half of the Moon is illuminated. Time to overcome challenges.",
        "Decision making, taking action, commitment",
    ),
    (
        PhaseName::WaxingGibbous,
        "\u{1F314}",
        "The Moon is almost full. Refine and adjust your plans.",
        "Refinement, patience, preparation",
    ),
    (
        PhaseName::FullMoon,
        "\u{1F315}",
        "The Moon is fully illuminated. Peak energy for manifestation and completion.",
        "Culmination, celebration, heightened emotions",
    ),
    (
        PhaseName::WaningGibbous,
        "\u{1F316}",
        "The Moon begins to wane. Time for gratitude and sharing.",
        "Gratitude, sharing wisdom, reflection",
    ),
    (
        PhaseName::LastQuarter,
        "\u{1F317}",
        "Half the Moon is illuminated. Time to release and let go.",
        "Release, forgiveness, letting go",
    ),
    (
        PhaseName::WaningCrescent,
        "\u{1F318}",
        "The Moon is almost gone. Time for rest and recuperation.",
        "Rest, surrender, spiritual connection",
    ),
];
