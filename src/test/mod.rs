


/// This module tests the IBE layer on its own.
mod ibe;



/// This module tests against the production beacon vectors.
mod vectors;
