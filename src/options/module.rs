//! Option Module Trait and Aggregate
//!
//! An option module is one immutable group of related settings. The aggregate
//! built from the options builder holds exactly one instance per concrete
//! module type, in build order, and consumers look modules up by type.

use std::any::Any;

/// One immutable group of configuration fields
///
/// Implementations are plain records; replacing a field means deriving a new
/// instance, never mutating one already handed out.
pub trait OptionModule: Any + Send + Sync {
    /// Short stable name, used in listings and diagnostics
    fn name(&self) -> &'static str;

    /// Upcast for typed lookup
    fn as_any(&self) -> &dyn Any;

    /// Clone into a fresh boxed module
    fn clone_module(&self) -> Box<dyn OptionModule>;
}

/// Implements [`OptionModule`] for a cloneable record type.
#[macro_export]
macro_rules! option_module {
    ($ty:ty, $name:literal) => {
        impl $crate::options::OptionModule for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn clone_module(&self) -> Box<dyn $crate::options::OptionModule> {
                Box::new(self.clone())
            }
        }
    };
}

/// Options wiring errors
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("module not registered: {0}")]
    ModuleNotRegistered(&'static str),

    #[error("no HTTP transport configured for {0}; tests exercising network-backed \
             components must install a mock transport explicitly")]
    TransportNotConfigured(&'static str),
}

/// Immutable, ordered collection of option modules, one per type
pub struct Options {
    modules: Vec<Box<dyn OptionModule>>,
}

impl Options {
    /// Capture an ordered module list.
    ///
    /// If the same concrete type appears more than once, the later instance
    /// replaces the earlier one in place, so lookup is never ambiguous.
    pub fn new(modules: Vec<Box<dyn OptionModule>>) -> Self {
        let mut ordered: Vec<Box<dyn OptionModule>> = Vec::new();
        for module in modules {
            let type_id = module.as_any().type_id();
            match ordered
                .iter()
                .position(|held| held.as_any().type_id() == type_id)
            {
                Some(index) => ordered[index] = module,
                None => ordered.push(module),
            }
        }
        Self { modules: ordered }
    }

    /// Look up the module of type `T`.
    ///
    /// Failing here is a wiring bug: the builder that produced this aggregate
    /// never registered `T`.
    pub fn get<T: OptionModule>(&self) -> Result<&T, OptionsError> {
        self.modules
            .iter()
            .find_map(|module| module.as_any().downcast_ref::<T>())
            .ok_or(OptionsError::ModuleNotRegistered(std::any::type_name::<T>()))
    }

    /// Module names in build order
    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|module| module.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Clone for Options {
    fn clone(&self) -> Self {
        Self {
            modules: self.modules.iter().map(|m| m.clone_module()).collect(),
        }
    }
}
