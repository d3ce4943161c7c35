//! Enumerated constants understood by WinXRay.
//!
//! Each constant is written to the options file as its integer code.

macro_rules! wxc_constant {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $code:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn code(self) -> i32 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn from_code(code: i32) -> Option<Self> {
                Self::ALL.iter().copied().find(|constant| constant.code() == code)
            }
        }
    };
}

wxc_constant!(
    /// Electron elastic cross section, used for both partial and total tables.
    ElasticCrossSectionType {
        MottTabulated = 0,
        MottTabulatedLinear = 1,
        MottTabulatedPowerLaw = 2,
        MottTabulatedCubicSpline = 3,
        MottParametrizedHd = 4,
        Rutherford = 5,
        RutherfordRelativistic = 6,
    }
);

wxc_constant!(
    /// X-ray ionization cross section, used for bremsstrahlung and characteristic lines.
    IonizationCrossSectionType {
        Casnati = 0,
        Gryzinski = 1,
    }
);

wxc_constant!(IonizationPotentialType {
    JoyLuo = 0,
    BergerSeltzer = 1,
});

wxc_constant!(RandomNumberGeneratorType {
    Ran1 = 1,
    Ran2 = 2,
    Ran3 = 3,
    Ran4 = 4,
});

wxc_constant!(DirectionCosineType { Demers = 0 });

wxc_constant!(EnergyLossType { JoyLuo = 0 });

wxc_constant!(MassAbsorptionCoefficientType {
    Heinrich = 0,
    Henke = 1,
    ThinhLeroux = 2,
});

wxc_constant!(
    /// Spectrum channel width.
    EvPerChannel {
        Type5 = 0,
        Type10 = 1,
        Type20 = 2,
        Type40 = 3,
    }
);

impl EvPerChannel {
    pub const fn width_ev(self) -> u32 {
        match self {
            Self::Type5 => 5,
            Self::Type10 => 10,
            Self::Type20 => 20,
            Self::Type40 => 40,
        }
    }

    /// Band of the requested energy per channel: <10, <20, <40 eV, or wider.
    pub fn for_ev_per_channel(ev_per_channel: f64) -> Self {
        if ev_per_channel < 10.0 {
            Self::Type5
        } else if ev_per_channel < 20.0 {
            Self::Type10
        } else if ev_per_channel < 40.0 {
            Self::Type20
        } else {
            Self::Type40
        }
    }
}
