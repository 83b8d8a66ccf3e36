/// User interface pieces that are not part of the main window layout
///
/// - `gallery.rs` - iced image handles for thumbnails and full views
/// - `grid.rs` - the three-column candidate grid
/// - `product.rs` - product summary panel
/// - `spinner.rs` - canvas busy indicator

pub mod gallery;
pub mod grid;
pub mod product;
pub mod spinner;
