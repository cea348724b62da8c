mod large_input;
mod mode_table;
