pub mod code_block;
