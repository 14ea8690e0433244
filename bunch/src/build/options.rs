#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TupleBunchOptions {
    module: Option<String>,
}

impl TupleBunchOptions {
    pub fn new() -> Self {
        Self { module: None }
    }

    /// Returns a label of the module defining a type.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn set_module(self, module: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
        }
    }
}

impl Default for TupleBunchOptions {
    fn default() -> Self {
        Self::new()
    }
}
