//! UIコンポーネントモジュール

pub mod favorite_button;

pub use favorite_button::FavoriteButton;
