// Engine modules: renderer, input, assets, audio, frame timing

pub mod assets;
pub mod audio;
pub mod frame_loop;
pub mod input;
pub mod renderer;
