pub mod alert;
pub mod product_card;
