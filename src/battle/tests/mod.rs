mod common;



#[cfg(test)]
mod test_status_application;




#[cfg(test)]
mod test_action_prevention;

#[cfg(test)]
mod test_catch;


#[cfg(test)]
mod test_properties;
