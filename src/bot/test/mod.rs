mod command;
mod mover;
mod selection;
