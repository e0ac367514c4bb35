pub mod workers_ai;
