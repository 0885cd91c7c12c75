pub mod add_patron_cmd;
pub mod get_patron_cmd;
pub mod pay_fine_cmd;
