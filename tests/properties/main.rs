//! Property test suite entry point.

mod normalize_props;
