pub mod advance_day_cmd;
