pub mod solsim_vis3d;
