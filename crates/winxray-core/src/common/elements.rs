//! Elemental symbols and mass densities used to describe WinXRay samples.
//!
//! WinXRay derives the sample density from the composition rather than
//! accepting a user value, so the same elemental table is needed here to
//! report the density the program will use.

pub const MAX_ATOMIC_NUMBER: u32 = 92;

const ELEMENT_SYMBOLS: [&str; MAX_ATOMIC_NUMBER as usize] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U",
];

// g/cm3, room temperature; gases at STP.
const MASS_DENSITY_G_CM3: [f64; MAX_ATOMIC_NUMBER as usize] = [
    0.0000899, 0.0001785, 0.534, 1.848, 2.34, 2.26, 0.0012506, 0.001429, 0.001696, 0.0009,
    0.971, 1.738, 2.698, 2.33, 1.82, 2.07, 0.003214, 0.001784, 0.862, 1.55,
    2.985, 4.54, 6.11, 7.19, 7.33, 7.874, 8.9, 8.902, 8.96, 7.133,
    5.904, 5.323, 5.73, 4.79, 3.12, 0.00375, 1.532, 2.54, 4.469, 6.506,
    8.57, 10.22, 11.5, 12.41, 12.41, 12.02, 10.5, 8.65, 7.31, 7.31,
    6.691, 6.24, 4.93, 0.0059, 1.873, 3.5, 6.145, 6.77, 6.773, 7.008,
    7.264, 7.52, 5.244, 7.901, 8.23, 8.551, 8.795, 9.066, 9.321, 6.966,
    9.841, 13.31, 16.654, 19.3, 21.02, 22.57, 22.42, 21.45, 19.3, 13.546,
    11.85, 11.35, 9.747, 9.32, 7.0, 0.00973, 1.87, 5.5, 10.07, 11.72,
    15.37, 18.95,
];

pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    index_for_atomic_number(atomic_number).map(|index| ELEMENT_SYMBOLS[index])
}

pub fn mass_density_g_cm3(atomic_number: u32) -> Option<f64> {
    index_for_atomic_number(atomic_number).map(|index| MASS_DENSITY_G_CM3[index])
}

const fn index_for_atomic_number(atomic_number: u32) -> Option<usize> {
    if atomic_number == 0 || atomic_number > MAX_ATOMIC_NUMBER {
        None
    } else {
        Some(atomic_number as usize - 1)
    }
}
