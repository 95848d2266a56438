pub mod battery_check;
