pub mod animethemes;
