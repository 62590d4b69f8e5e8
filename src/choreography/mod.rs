pub(crate) mod anchor;
pub(crate) mod parallax;
pub(crate) mod progress;
pub(crate) mod reveal;
pub(crate) mod scene;
pub(crate) mod sticky;
