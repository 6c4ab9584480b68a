// Crate-internal.
// ---

pub(crate) mod providers {
    pub(crate) mod file_provider;
    pub(crate) mod static_provider;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported under `ext` in the root of the
    // crate.

    pub mod providers {
        pub use crate::impl_ext::providers::file_provider::*;
        pub use crate::impl_ext::providers::static_provider::*;
    }
}
