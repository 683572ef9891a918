//! Application services for the board directory and membership.

mod access;
mod directory;
mod error;
mod membership;

pub use access::{AuthorizedBoard, BoardLookupError, authorize_board};
pub use directory::{
    BoardDirectoryService, BoardListing, BoardOverview, BoardSettings, CreateBoardRequest,
    TaskCounts,
};
pub use error::{BoardServiceError, BoardServiceResult};
pub use membership::{MemberRemoval, MembershipService};
