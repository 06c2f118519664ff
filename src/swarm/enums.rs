pub mod swarm_error;
