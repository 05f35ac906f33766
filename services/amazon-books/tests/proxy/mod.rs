mod handle;
mod live;
mod mock;
