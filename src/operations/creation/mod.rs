//! Closed-shape constructors for the poloidal and toroidal figures.

mod make_d_ring;
mod make_elliptical_sector;
mod make_gapped_d;
mod make_quarter_annulus;
mod make_rotated_leg;
mod make_separatrix;
mod make_tf_coil;

pub use make_d_ring::MakeDRing;
pub use make_elliptical_sector::MakeEllipticalSector;
pub use make_gapped_d::{GappedD, GappedDParams, MakeGappedD, DEFAULT_DIVERTOR_GAP};
pub use make_quarter_annulus::MakeQuarterAnnulus;
pub use make_rotated_leg::MakeRotatedLeg;
pub use make_separatrix::{MakeSeparatrix, Separatrix};
pub use make_tf_coil::{MakeTfCoil, TfArcPoints};

/// Samples per nested-D half-section.
pub const D_SECTION_SAMPLES: usize = 50;

/// Samples per separatrix arc.
pub const SEPARATRIX_SAMPLES: usize = 256;

/// Samples per elliptical or circular arc.
pub const ARC_SAMPLES: usize = 50;
