pub mod count_token_frequencies;
pub mod find_column;
pub mod open_dataset_file;
pub mod paginate;
pub mod read_articles;
pub mod read_word_counts;
pub mod sort_results;

pub use count_token_frequencies::count_token_frequencies;
pub use find_column::find_column;
pub use open_dataset_file::open_dataset_file;
pub use paginate::paginate;
pub use read_articles::read_articles;
pub use read_word_counts::read_word_counts;
pub use sort_results::sort_results;
