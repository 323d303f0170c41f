pub mod resolver;

pub use resolver::HickoryAResolver;
