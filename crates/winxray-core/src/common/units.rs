const EV_PER_KEV: f64 = 1000.0;
const NM_PER_M: f64 = 1e9;

pub fn energy_ev_to_kev(energy_ev: f64) -> f64 {
    energy_ev / EV_PER_KEV
}

pub fn length_m_to_nm(length_m: f64) -> f64 {
    length_m * NM_PER_M
}

pub fn radians_to_degrees(angle_rad: f64) -> f64 {
    angle_rad.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::{energy_ev_to_kev, length_m_to_nm, radians_to_degrees};

    #[test]
    fn conversions_use_fixed_factors() {
        assert_eq!(energy_ev_to_kev(1234.0), 1.234);
        assert!((length_m_to_nm(25e-9) - 25.0).abs() < 1e-9);
        assert!((radians_to_degrees(std::f64::consts::PI) - 180.0).abs() < 1e-12);
    }
}
