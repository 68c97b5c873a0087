use thiserror::Error;

/// Represents all errors that can occur while tokenizing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no known token.
    #[error("Unknown token starting with '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
}
