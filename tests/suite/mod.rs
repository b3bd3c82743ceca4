mod navigation;
mod overlay;
mod shell;
