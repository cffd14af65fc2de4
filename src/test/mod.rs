mod cmd;
mod input;
