// Logging shim: forwards to defmt when the `defmt` feature is enabled,
// otherwise expands to nothing (arguments are still borrowed so they count as used).

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( & $x ),*);
        }
    };
}

pub(crate) use trace;
