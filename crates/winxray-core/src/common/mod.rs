pub mod elements;
pub mod units;

pub use elements::{MAX_ATOMIC_NUMBER, element_symbol, mass_density_g_cm3};
pub use units::{energy_ev_to_kev, length_m_to_nm, radians_to_degrees};
