//! Engine-level behavior with hand-built grammars.
