pub mod digits;
pub mod index;
pub mod node;
pub mod phone;

pub use digits::digits_only;
pub use index::OkvedIndex;
pub use node::OkvedNode;
pub use phone::{normalize_phone, NormalizedPhone};
