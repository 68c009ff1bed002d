pub mod common;



#[cfg(test)]
mod test_pp_exhaustion;

#[cfg(test)]
mod test_fainting;
