mod mod_binary;
mod mod_cli;
