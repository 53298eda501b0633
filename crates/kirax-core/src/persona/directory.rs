//! Name lookup over the specialist presets.

use super::model::Persona;
use super::preset::default_personas;
use crate::error::{KiraxError, Result};

/// Lookup table over the fixed specialist personas.
///
/// The selector UI is constrained to the preset names, so a failed lookup
/// indicates a caller bug rather than user input.
#[derive(Debug, Clone)]
pub struct PersonaDirectory {
    personas: Vec<Persona>,
}

impl PersonaDirectory {
    /// Creates a directory holding the default presets.
    pub fn new() -> Self {
        Self {
            personas: default_personas(),
        }
    }

    /// Looks a persona up by its display name.
    ///
    /// # Returns
    ///
    /// - `Ok(&Persona)`: The matching persona
    /// - `Err(KiraxError::NotFound)`: Name outside the preset set
    pub fn get(&self, name: &str) -> Result<&Persona> {
        self.personas
            .iter()
            .find(|persona| persona.name == name)
            .ok_or_else(|| KiraxError::not_found("persona", name))
    }

    /// Returns all personas in selector order.
    pub fn all(&self) -> &[Persona] {
        &self.personas
    }
}

impl Default for PersonaDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::DEFAULT_PERSONA_NAME;

    #[test]
    fn test_seven_presets() {
        let directory = PersonaDirectory::new();
        assert_eq!(directory.all().len(), 7);
    }

    #[test]
    fn test_default_persona_exists() {
        let directory = PersonaDirectory::new();
        let persona = directory.get(DEFAULT_PERSONA_NAME).unwrap();
        assert!(persona.system_prompt.contains("Kirax Research"));
    }

    #[test]
    fn test_lookup_by_name() {
        let directory = PersonaDirectory::new();
        let persona = directory.get("Dev Helper").unwrap();
        assert!(persona.system_prompt.contains("programação"));
    }

    #[test]
    fn test_unknown_name_fails() {
        let directory = PersonaDirectory::new();
        let err = directory.get("Especialista Fantasma").unwrap_err();
        assert!(err.is_not_found());
    }
}
