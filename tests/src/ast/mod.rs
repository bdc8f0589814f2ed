mod builder;
mod destroy;
