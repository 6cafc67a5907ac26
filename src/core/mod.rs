// Domain-layer modules and shared errors/models
pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}

pub mod profiles {
    pub use crate::profiles::*;
}

pub mod scoring {
    pub use crate::scoring::*;
}

pub mod session {
    pub use crate::session::*;
}

pub mod validation {
    pub use crate::validation::*;
}
