mod drone;
mod load;
mod medication;
