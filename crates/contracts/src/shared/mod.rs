pub mod list_window;
