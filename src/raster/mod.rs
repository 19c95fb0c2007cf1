pub(crate) mod analysis;
pub(crate) mod bitmap;
pub(crate) mod codec;
pub(crate) mod composite;
pub(crate) mod rotate;
pub(crate) mod shapes;
