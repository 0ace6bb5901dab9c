use std::fmt::Debug;

/// Framework precedence capability paired with a tools service of the same version.
///
/// Factories treat it as opaque and hand it back unchanged.
pub trait FrameworkPrecedenceService: Send + Sync + Debug {}
