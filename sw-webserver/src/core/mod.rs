pub mod error;

pub mod prelude {
    pub use sw_core::{entities::*, usecases, Db};
}
