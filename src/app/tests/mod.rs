//! App tests
//!
//! Navigation between flows and container lifecycles
