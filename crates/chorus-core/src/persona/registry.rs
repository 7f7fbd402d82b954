//! Registry of persona instructions, indexed by key.
//!
//! Built once at startup and read-only afterwards. Resolution always
//! succeeds: unknown or absent keys fall back to the default persona.

use std::collections::HashMap;

use chorus_types::persona::Persona;

/// Key of the fallback persona. Always present in a registry.
pub const DEFAULT_PERSONA_KEY: &str = "default";

/// Persona used when a compare request supplies no persona list.
pub const DEFAULT_COMPARE_PERSONA: &str = "modi";

const MODI_INSTRUCTION: &str = "You are responding in the style of Narendra Modi, \
Prime Minister of India. Use his characteristic speaking patterns: address the \
audience as 'my dear friends' or 'mitron', reference 'New India', 'Digital India' \
and 'Atmanirbhar Bharat', and keep an inspirational, forward-looking tone focused \
on development, technology and youth empowerment. IMPORTANT: keep responses SHORT \
and CONCISE (2-3 sentences maximum). Respond in Hinglish, mixing Hindi words such \
as 'bhaiyon aur behno', 'desh', 'yuva', 'vikas' and 'pragati' naturally into \
English sentences, as Modi does in his speeches. When encountering inappropriate \
language, respond with his diplomatic style and redirect to constructive dialogue \
about progress, for example 'Mitron, let us focus on constructive dialogue'.";

const DEFAULT_INSTRUCTION: &str = "You are responding in the style of Narendra Modi, \
Prime Minister of India. Use his characteristic speaking patterns: address the \
audience as 'my dear friends' or 'mitron', reference 'New India', 'Digital India' \
and 'Atmanirbhar Bharat', and keep an inspirational, forward-looking tone focused \
on development, technology and youth empowerment. IMPORTANT: keep responses SHORT \
and CONCISE (2-3 sentences maximum). Respond in Hinglish, mixing Hindi words such \
as 'bhaiyon aur behno', 'desh', 'yuva', 'vikas' and 'pragati' naturally into \
English sentences, as Modi does in his speeches.";

/// Registry of available personas, indexed by key.
///
/// Resolution never fails: lookups for unknown keys land on the entry
/// registered under [`DEFAULT_PERSONA_KEY`].
pub struct PersonaRegistry {
    instructions: HashMap<String, String>,
}

impl PersonaRegistry {
    /// Create a registry containing only the default persona.
    pub fn new(default_instruction: impl Into<String>) -> Self {
        let mut instructions = HashMap::new();
        instructions.insert(DEFAULT_PERSONA_KEY.to_string(), default_instruction.into());
        Self { instructions }
    }

    /// The registry shipped with the proxy: the `modi` persona plus the
    /// default entry.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_INSTRUCTION).with_persona(Persona::new("modi", MODI_INSTRUCTION))
    }

    /// Register a persona. An existing entry under the same key is replaced.
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.instructions.insert(persona.key, persona.instruction);
        self
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.instructions.contains_key(key)
    }

    /// The registered key a lookup lands on: `key` itself when registered,
    /// else [`DEFAULT_PERSONA_KEY`].
    pub fn canonical_key<'a>(&self, key: Option<&'a str>) -> &'a str {
        match key {
            Some(k) if self.contains(k) => k,
            _ => DEFAULT_PERSONA_KEY,
        }
    }

    /// Instruction text for `key`, falling back to the default persona for
    /// unknown or absent keys. Resolution always succeeds.
    pub fn resolve(&self, key: Option<&str>) -> &str {
        let canonical = self.canonical_key(key);
        self.instructions
            .get(canonical)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
