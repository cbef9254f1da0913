/*
[INPUT]:  Wall identifiers, credentials, and field selections
[OUTPUT]: Keyed post pages with cursor navigation
[POS]:    Wall layer - paginated feed orchestration
[UPDATE]: When the fetch flow or pagination contract changes
*/

pub mod cursors;
pub mod stream;

pub use cursors::PageCursors;
pub use stream::{DEFAULT_WALL_LIMIT, WallStreamClient};
