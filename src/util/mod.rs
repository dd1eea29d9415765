pub mod datastructure;
