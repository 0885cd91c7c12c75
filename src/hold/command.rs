pub mod request_item_cmd;
