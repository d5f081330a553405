mod background;
mod language_mode;
mod user_record;
