//! Special actions and the resource kinds that pay for them.
//!
//! Every special is gated by one kind of the player's stockpile:
//!
//! | Special       | Paid with |
//! |---------------|-----------|
//! | `Tannhauser`  | exotic    |
//! | `Terraform`   | biomass   |
//! | `DefenceNet`  | metal     |
//! | `StellarBomb` | energy    |

use serde::{Deserialize, Serialize};

/// One of the four resource kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Metal,
    Biomass,
    Energy,
    Exotic,
}

impl ResourceKind {
    /// All kinds, in stockpile order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Metal,
        ResourceKind::Biomass,
        ResourceKind::Energy,
        ResourceKind::Exotic,
    ];

    /// Position of this kind in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ResourceKind::Metal => 0,
            ResourceKind::Biomass => 1,
            ResourceKind::Energy => 2,
            ResourceKind::Exotic => 3,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Metal => "metal",
            ResourceKind::Biomass => "biomass",
            ResourceKind::Energy => "energy",
            ResourceKind::Exotic => "exotic",
        };
        f.write_str(name)
    }
}

/// A resource-gated player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Special {
    /// Open a new connection from an owned world.
    Tannhauser,
    /// Reseed an owned world's resources at the terraformed tier.
    Terraform,
    /// Raise the shield of an owned world.
    DefenceNet,
    /// Halve the fleets of an enemy world next to an owned one.
    StellarBomb,
}

impl Special {
    pub const ALL: [Special; 4] = [
        Special::Tannhauser,
        Special::Terraform,
        Special::DefenceNet,
        Special::StellarBomb,
    ];

    /// The stockpile kind spent by this special.
    #[must_use]
    pub const fn paid_with(self) -> ResourceKind {
        match self {
            Special::Tannhauser => ResourceKind::Exotic,
            Special::Terraform => ResourceKind::Biomass,
            Special::DefenceNet => ResourceKind::Metal,
            Special::StellarBomb => ResourceKind::Energy,
        }
    }
}

impl std::fmt::Display for Special {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Special::Tannhauser => "Tannhauser",
            Special::Terraform => "Terraforming",
            Special::DefenceNet => "Defence net",
            Special::StellarBomb => "Stellar bomb",
        };
        f.write_str(name)
    }
}
