mod matcher;
mod pool;
