mod mock_book_repository;
mod scripted_view;

pub use mock_book_repository::MockBookRepository;
pub use scripted_view::ScriptedView;
