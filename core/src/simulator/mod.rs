pub mod walk;

pub use walk::advance;
