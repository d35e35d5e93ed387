pub mod cash_in_out_reader;
