pub mod tg;
