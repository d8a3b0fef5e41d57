pub mod trace_vis3d;
